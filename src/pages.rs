//! Page generation modules for each route
//!
//! This module organizes HTML page generators by route (article list,
//! article, not found). Each page module handles its specific view logic
//! and utilizes shared components from the components module.

pub mod home;
pub mod not_found;
pub mod post;
