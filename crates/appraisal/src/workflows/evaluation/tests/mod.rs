mod common;
mod scoring;
mod submission;
