use std::collections::VecDeque;

use mockall::mock;
use rvmon_sdb::source::LineSource;

mock! {
    pub Source {}
    impl LineSource for Source {
        fn read_line(&mut self, prompt: &str) -> Option<String>;
    }
}

/// A source that yields `lines` in order, then end of input.
pub fn scripted(lines: &[&str]) -> MockSource {
    let mut queue: VecDeque<String> = lines.iter().map(|line| (*line).to_owned()).collect();
    let mut source = MockSource::new();
    let _ = source.expect_read_line().returning(move |_| queue.pop_front());
    source
}
