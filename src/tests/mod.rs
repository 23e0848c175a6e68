mod simplification_tests;
