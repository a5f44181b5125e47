pub mod line_item_reader;
pub mod receipt_writer;
