mod networks_tests;
