use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_queues::{sort, Deque, Error, RandomQueue};
use std::collections::VecDeque;

proptest! {
    #[test]
    fn random_push_and_pop(
        pushes in proptest::collection::vec(any::<bool>(), 0..64),
        pops in proptest::collection::vec(any::<bool>(), 1..64)
    ) {
        let mut l: Deque<usize> = Deque::new();

        let len = pushes.len();

        for (p, v) in pushes.into_iter().zip(0..len) {
            if p {
                l.push_front(v);
            } else {
                l.push_back(v);
            }
        }
        prop_assert_eq!(len, l.len());

        for p in pops.iter().cycle().take(len) {
            let r = if *p { l.pop_front() } else { l.pop_back() };
            prop_assert!(r.is_ok());
        }

        prop_assert!(l.is_empty());
        prop_assert_eq!(0, l.len());
        prop_assert_eq!(Err(Error::EmptyContainer), l.pop_front());
    }
}

proptest! {
    #[test]
    fn random_interleaved_push_and_pop(
        action in proptest::collection::vec(any::<usize>(), 0..64)
    ){
        let mut l: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in action {
            match a & 0x03 {
                0x00 => {
                    l.push_front(a);
                    model.push_front(a);
                },
                0x01 => {
                    l.push_back(a);
                    model.push_back(a);
                },
                0x02 => {
                    prop_assert_eq!(model.pop_front().ok_or(Error::EmptyContainer), l.pop_front());
                },
                0x03 => {
                    prop_assert_eq!(model.pop_back().ok_or(Error::EmptyContainer), l.pop_back());
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), l.len());
            prop_assert_eq!(l.len(), l.iter().count());
            prop_assert_eq!(model.iter().collect::<Vec<_>>(), l.iter().collect::<Vec<_>>());
        }
    }
}

proptest! {
    #[test]
    fn random_queue_keeps_what_it_is_given(
        seed in any::<u64>(),
        action in proptest::collection::vec(any::<u16>(), 0..256)
    ) {
        let mut q = RandomQueue::with_rng(StdRng::seed_from_u64(seed));
        let mut model: Vec<u16> = Vec::new();

        for a in action {
            if a % 3 == 0 {
                match q.dequeue() {
                    Ok(v) => {
                        let at = model.iter().position(|m| *m == v);
                        prop_assert!(at.is_some());
                        if let Some(at) = at {
                            model.swap_remove(at);
                        }
                    }
                    Err(e) => {
                        prop_assert_eq!(Error::EmptyContainer, e);
                        prop_assert!(model.is_empty());
                    }
                }
            } else {
                q.enqueue(a);
                model.push(a);
            }

            prop_assert_eq!(model.len(), q.len());
            prop_assert!(q.capacity() >= 2);
            prop_assert!(q.len() <= q.capacity());
            prop_assert!(q.is_empty() || q.capacity() <= 4 * q.len());
        }

        let mut seen: Vec<u16> = q.iter().collect();
        seen.sort();
        model.sort();
        prop_assert_eq!(&model, &seen);

        let mut drained = Vec::new();
        while let Ok(v) = q.dequeue() {
            drained.push(v);
        }
        drained.sort();
        prop_assert_eq!(model, drained);
    }
}

proptest! {
    #[test]
    fn sort_agrees_with_std(
        words in proptest::collection::vec("[a-e]{0,3}", 0..48)
    ) {
        let mut expected = words.clone();
        expected.sort();

        prop_assert_eq!(expected, sort(words));
    }
}
