pub mod fixtures;

mod engine_choice_tests;
mod engine_match_tests;
mod hunter_tests;
mod index_tests;
mod results_tests;
