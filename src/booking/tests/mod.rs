// src/booking/tests/mod.rs

mod controller_tests;
mod support;
