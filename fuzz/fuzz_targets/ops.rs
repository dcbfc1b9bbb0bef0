#![no_main]
use arbitrary::Arbitrary;
use ct_ops::{compare, equal, select, swap};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    Select(bool),
    Equal,
    Compare,
    Swap(bool),
}

fuzz_target!(|operations: Vec<(i64, i64, Operation)>| {
    for (a, b, op) in operations {
        match op {
            Operation::Select(cond) => {
                assert_eq!(select(cond, a, b), if cond { a } else { b });
            }
            Operation::Equal => assert_eq!(equal(a, b), a == b),
            Operation::Compare => {
                assert_eq!(compare(a, b), a.cmp(&b) as i8);
                assert_eq!(compare(a as u64, b as u64), (a as u64).cmp(&(b as u64)) as i8);
            }
            Operation::Swap(cond) => {
                let (mut x, mut y) = (a, b);
                swap(cond, &mut x, &mut y);
                assert_eq!((x, y), if cond { (b, a) } else { (a, b) });
            }
        }
    }
});
