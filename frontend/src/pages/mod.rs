pub mod analyzer;
pub mod demo;
pub mod faq;
pub mod home;
pub mod legal;
pub mod marketing;
pub mod not_found;
pub mod pricing;
pub mod success;
