
mod boundary_tests;
