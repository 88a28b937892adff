use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::catalog_page::{CatalogHome, CatalogPage};
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/centers")]
    CatalogHome {},


    #[route("/centers/:filters")]
    CatalogPage {
        filters: UrlParam<FilterState>,
    },

}

impl Route {
    pub fn catalog_page_from_filters(filters: FilterState) -> Self {
        Self::CatalogPage { filters: UrlParam::from(filters) }
    }
}
