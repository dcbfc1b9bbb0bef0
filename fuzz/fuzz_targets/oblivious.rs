#![no_main]
use ct_ops::{compact, sort};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|entries: Vec<(u32, bool)>| {
    let (mut data, keep): (Vec<u32>, Vec<bool>) = entries.iter().copied().unzip();
    let expected: Vec<u32> = entries.iter().filter(|(_, k)| *k).map(|(x, _)| *x).collect();
    let kept = compact(&mut data, &keep);
    assert_eq!(&data[..kept], &expected[..]);

    let mut expected = data.clone();
    expected.sort_unstable();
    sort(&mut data);
    assert_eq!(data, expected);
});
