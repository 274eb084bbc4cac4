mod common;

mod recommendations;
mod scoring;
