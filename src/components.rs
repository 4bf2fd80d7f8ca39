//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! types (home, post, not found): the page frame, site navigation and
//! article cards.

pub mod article_list;
pub mod footer;
pub mod layout;
pub mod nav;
