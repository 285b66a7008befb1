mod dasha_tests;
mod nakshatra_tests;
mod rashi_tests;
