pub mod scrapbook;
