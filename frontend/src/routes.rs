use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::corpus_page::CorpusPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/corpus")]
    CorpusPage {},

}
