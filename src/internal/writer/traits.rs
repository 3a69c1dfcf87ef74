pub mod chunk_sink;
