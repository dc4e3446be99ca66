mod trust_tests;
