pub mod stream_harness;
