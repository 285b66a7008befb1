mod decans_tests;
mod sign_tests;
