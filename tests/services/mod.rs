mod category_service_tests;
mod product_service_tests;
