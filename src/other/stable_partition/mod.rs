pub mod buffered;
