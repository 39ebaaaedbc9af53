mod category_tests;
mod health_tests;
