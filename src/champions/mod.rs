pub mod images;
pub mod url;
pub mod wikitext;
