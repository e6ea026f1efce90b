#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use circular_deque::{Deque, Error};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    AddBack(i32),
    AddFront(i32),
    AddBackSlice(Vec<i32>, usize, usize),
    AddFrontRange(Vec<i32>),
    Back,
    Clear,
    Clone,
    Contains(i32),
    CopyTo(usize, usize),
    Front,
    Get(usize),
    IndexOf(i32),
    Insert(usize, i32),
    InsertRange(usize, Vec<i32>),
    Iter,
    Len,
    Remove(i32),
    RemoveAt(usize),
    RemoveBack,
    RemoveFront,
    RemoveRange(usize, usize),
    Set(usize, i32),
    SetCapacity(usize),
}

const MAX_LEN: usize = 1000000;

fuzz_target!(|data: Vec<Op>| { fuzz(&data) });

fn fuzz(data: &[Op]) {
    let mut d = Deque::<i32>::with_capacity(1);
    let mut v = VecDeque::<i32>::new();

    for op in data {
        match op {
            &Op::AddBack(i) => {
                if v.len() < MAX_LEN {
                    d.add_back(i);
                    v.push_back(i);
                }
            }
            &Op::AddFront(i) => {
                if v.len() < MAX_LEN {
                    d.add_front(i);
                    v.push_front(i);
                }
            }
            Op::AddBackSlice(src, from, count) => {
                let fits = from.checked_add(*count).map_or(false, |end| end <= src.len());
                match d.add_back_slice(src, *from, *count) {
                    Ok(()) => {
                        assert!(fits);
                        v.extend(&src[*from..*from + *count]);
                    }
                    Err(e) => {
                        assert!(!fits);
                        assert!(matches!(e, Error::InvalidArgument(_)));
                    }
                }
            }
            Op::AddFrontRange(items) => {
                d.add_front_range(items.iter().copied());
                for &i in items.iter().rev() {
                    v.push_front(i);
                }
            }
            Op::Back => {
                assert_eq!(d.back(), v.back());
            }
            Op::Clear => {
                d.clear();
                v.clear();
                assert!(d.is_empty());
            }
            Op::Clone => {
                let copy = d.clone();
                d.add_back(0);
                assert!(copy.iter().eq(v.iter()));
                d.remove_back().unwrap();
            }
            Op::Contains(i) => {
                assert_eq!(d.contains(i), v.contains(i));
            }
            &Op::CopyTo(extra, offset) => {
                let mut dest = vec![0; v.len() + extra % 16];
                let offset = offset % (dest.len() + 2);
                match d.copy_to(&mut dest, offset) {
                    Ok(()) => assert!(dest[offset..offset + v.len()].iter().eq(v.iter())),
                    Err(e) => {
                        assert!(offset + v.len() > dest.len());
                        assert!(matches!(e, Error::InvalidArgument(_)));
                    }
                }
            }
            Op::Front => {
                assert_eq!(d.front(), v.front());
            }
            &Op::Get(i) => {
                assert_eq!(d.get(i).ok(), v.get(i));
                if !v.is_empty() {
                    let i = i % v.len();
                    assert_eq!(d.get(i).ok(), v.get(i));
                    assert_eq!(d[i], v[i]);
                }
            }
            Op::IndexOf(i) => {
                assert_eq!(d.index_of(i), v.iter().position(|x| x == i));
            }
            &Op::Insert(i, a) => {
                let i = i % (v.len() + 1);
                d.insert(i, a).unwrap();
                v.insert(i, a);
            }
            Op::InsertRange(i, items) => {
                let i = i % (v.len() + 2);
                if i > v.len() {
                    let err = d.insert_range(i, items.iter().copied()).unwrap_err();
                    assert_eq!(err, Error::IndexOutOfRange { index: i, len: v.len() });
                } else {
                    d.insert_range(i, items.iter().copied()).unwrap();
                    let tail = v.split_off(i);
                    v.extend(items);
                    v.extend(tail);
                }
            }
            Op::Iter => {
                let mut d_iter = d.iter();
                let mut v_iter = v.iter();
                while v_iter.len() > 0 {
                    assert_eq!(d_iter.len(), v_iter.len());
                    if fastrand::bool() {
                        assert_eq!(d_iter.next(), v_iter.next());
                    } else {
                        assert_eq!(d_iter.next_back(), v_iter.next_back());
                    }
                }
                assert_eq!(d_iter.next(), None);
            }
            Op::Len => {
                assert_eq!(d.len(), v.len());
                assert_eq!(d.is_empty(), v.is_empty());
            }
            Op::Remove(i) => {
                let pos = v.iter().position(|x| x == i);
                assert_eq!(d.remove(i), pos.is_some());
                if let Some(pos) = pos {
                    v.remove(pos);
                }
            }
            &Op::RemoveAt(i) => {
                if v.is_empty() {
                    assert!(d.remove_at(i).is_err());
                } else {
                    let i = i % v.len();
                    assert_eq!(d.remove_at(i).ok(), v.remove(i));
                }
            }
            Op::RemoveBack => {
                assert_eq!(d.remove_back().ok(), v.pop_back());
            }
            Op::RemoveFront => {
                assert_eq!(d.remove_front().ok(), v.pop_front());
            }
            &Op::RemoveRange(i, count) => {
                if v.is_empty() {
                    assert!(matches!(d.remove_range(i, count), Err(Error::InvalidState(_))));
                    continue;
                }
                let i = i % v.len();
                let count = count % (v.len() - i + 2);
                if i + count > v.len() {
                    assert!(matches!(d.remove_range(i, count), Err(Error::IndexOutOfRange { .. })));
                } else {
                    d.remove_range(i, count).unwrap();
                    v.drain(i..i + count);
                }
            }
            &Op::Set(i, a) => {
                if !v.is_empty() {
                    let i = i % v.len();
                    assert_eq!(d.set(i, a).ok(), Some(v[i]));
                    v[i] = a;
                }
            }
            &Op::SetCapacity(cap) => {
                let cap = cap % (2 * v.len() + 8);
                match d.set_capacity(cap) {
                    Ok(()) => {
                        assert!(cap >= v.len());
                        assert_eq!(d.capacity(), cap.max(1).next_power_of_two());
                    }
                    Err(e) => {
                        assert!(cap < v.len());
                        assert!(matches!(e, Error::InvalidState(_)));
                    }
                }
            }
        }
        assert!(d.capacity().is_power_of_two());
        assert!(d.iter().eq(v.iter()));
    }
}
