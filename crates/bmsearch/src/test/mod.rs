pub mod test_matcher;
