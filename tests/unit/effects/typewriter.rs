use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn grows_one_char_per_interval() {
    let mut tw = Typewriter::new("hello", 100, TimeMs(0));
    assert_eq!(tw.poll(TimeMs(99)), "");
    assert_eq!(tw.poll(TimeMs(100)), "h");
    assert_eq!(tw.poll(TimeMs(199)), "h");
    assert_eq!(tw.poll(TimeMs(200)), "he");
    assert_eq!(tw.poll(TimeMs(300)), "hel");
    assert_eq!(tw.poll(TimeMs(400)), "hell");
    assert_eq!(tw.poll(TimeMs(500)), "hello");
}

#[test]
fn late_poll_catches_up_without_overshoot() {
    let mut tw = Typewriter::new("abc", 100, TimeMs(0));
    assert_eq!(tw.poll(TimeMs(250)), "ab");
    assert_eq!(tw.poll(TimeMs(10_000)), "abc");
    assert_eq!(tw.poll(TimeMs(20_000)), "abc");
}

#[test]
fn completion_fires_exactly_once_at_n_times_delay() {
    let count = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&count);
    let mut tw = Typewriter::new("hello", 100, TimeMs(0));
    tw.set_on_complete(move || seen.set(seen.get() + 1));

    tw.poll(TimeMs(499));
    assert!(!tw.is_complete());
    assert_eq!(count.get(), 0);

    tw.poll(TimeMs(500));
    assert!(tw.is_complete());
    assert_eq!(count.get(), 1);

    tw.poll(TimeMs(900));
    tw.poll(TimeMs(5000));
    assert_eq!(count.get(), 1);
}

#[test]
fn multibyte_text_splits_on_char_boundaries() {
    let mut tw = Typewriter::new("hé♥", 50, TimeMs(0));
    assert_eq!(tw.len_chars(), 3);
    assert_eq!(tw.poll(TimeMs(50)), "h");
    assert_eq!(tw.poll(TimeMs(100)), "hé");
    assert_eq!(tw.poll(TimeMs(150)), "hé♥");
    assert!(tw.is_complete());
}

#[test]
fn empty_message_completes_immediately() {
    let fired = Rc::new(Cell::new(false));
    let seen = Rc::clone(&fired);
    let mut tw = Typewriter::new("", 100, TimeMs(0));
    tw.set_on_complete(move || seen.set(true));
    assert!(fired.get());
    assert_eq!(tw.poll(TimeMs(1000)), "");
}
