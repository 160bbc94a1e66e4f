pub mod version_tests;
