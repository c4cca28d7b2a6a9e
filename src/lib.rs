//! Stateless helpers backing the Harding men's soccer extraction workflow.
//! Each function is an independent transformation; composition happens at the
//! call site in the workflow host.

pub mod constants;
pub mod html;
pub mod logging;
pub mod retry;
pub mod urls;
pub mod validation;
pub mod years;
