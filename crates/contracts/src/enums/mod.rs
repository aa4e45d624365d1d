pub mod page_type;
