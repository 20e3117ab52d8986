mod database_tests;
