pub mod member;
pub mod record;
pub mod report;
