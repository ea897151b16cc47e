#![cfg(loom)]

use halo_atomic::AtomicBool;
use loom::sync::atomic::{AtomicUsize, Ordering};
use loom::sync::Arc;
use loom::thread;

#[test]
fn try_set_true_has_one_winner() {
    loom::model(|| {
        let flag = Arc::new(AtomicBool::new(false));
        let winners = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let flag = flag.clone();
                let winners = winners.clone();
                thread::spawn(move || {
                    if flag.try_set_true() {
                        winners.fetch_add(1, Ordering::Relaxed);
                    }
                })
            })
            .collect();

        if flag.try_set_true() {
            winners.fetch_add(1, Ordering::Relaxed);
        }
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(winners.load(Ordering::Relaxed), 1);
        assert!(flag.read());
    });
}

#[test]
fn write_release_pairs_with_read_acquire() {
    loom::model(|| {
        let ready = Arc::new(AtomicBool::new(false));
        let data = Arc::new(AtomicUsize::new(0));

        let producer = {
            let ready = ready.clone();
            let data = data.clone();
            thread::spawn(move || {
                data.store(7, Ordering::Relaxed);
                ready.write(true);
            })
        };

        if ready.read() {
            assert_eq!(data.load(Ordering::Relaxed), 7);
        }
        producer.join().unwrap();
    });
}

#[test]
fn exchange_hands_off_exactly_once() {
    loom::model(|| {
        let flag = Arc::new(AtomicBool::new(true));
        let other = {
            let flag = flag.clone();
            thread::spawn(move || flag.exchange(false))
        };
        let mine = flag.exchange(false);
        let theirs = other.join().unwrap();

        // Exactly one exchange observed the original `true`.
        assert!(mine ^ theirs);
        assert!(!flag.read());
    });
}
