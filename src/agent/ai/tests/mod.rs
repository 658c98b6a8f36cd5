mod evaluation_tests;
