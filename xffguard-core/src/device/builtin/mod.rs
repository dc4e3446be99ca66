pub mod header_rewrite;
