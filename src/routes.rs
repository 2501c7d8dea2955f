use dioxus::prelude::*;
use crate::views::{ Bookmark, Home, Inbox, Library, TabBar };

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(TabBar)]
        #[route("/")]
        Home,
        #[route("/inbox")]
        Inbox,
        #[route("/library")]
        Library,
    #[end_layout]
    #[route("/bookmark/:fixture_id")]
    Bookmark {
        fixture_id: String,
    },
}
