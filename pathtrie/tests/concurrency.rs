use pathtrie::{PathRouter, RouteResult};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

mod common;
use common::{endpoint, router_with, service_router};

const WRITES: usize = 500;

#[test]
fn test_readers_never_see_half_inserted_paths() {
    let router: PathRouter<usize> = PathRouter::new();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    for i in (0..WRITES).step_by(7) {
                        match router.resolve(&format!("/k/{i}/leaf")) {
                            RouteResult::Matched(value) => assert_eq!(value, i),
                            RouteResult::NotFound => {}
                        }
                    }
                }
            });
        }

        s.spawn(|| {
            for i in 0..WRITES {
                router.insert(&format!("/k/{i}/leaf"), i).unwrap();
            }
            done.store(true, Ordering::Release);
        });
    });

    assert_eq!(router.len(), WRITES);
    for i in 0..WRITES {
        assert_eq!(router.resolve(&format!("/K/{i}/LEAF/")), RouteResult::Matched(i));
    }
}

#[test]
fn test_stable_route_survives_sibling_churn() {
    let router = router_with(&[("/shared/stable", 0usize)]);
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    assert_eq!(router.resolve("/shared/stable"), RouteResult::Matched(0));
                    assert_eq!(router.resolve("//SHARED//stable"), RouteResult::Matched(0));
                }
            });
        }

        s.spawn(|| {
            for i in 1..=WRITES {
                let path = format!("/shared/churn/{i}");
                router.insert(&path, i).unwrap();
                assert_eq!(router.delete(&path), Ok(i));
            }
            done.store(true, Ordering::Release);
        });
    });

    let stats = router.stats();
    assert_eq!(stats.paths, 1);
    // `/shared` keeps its one remaining reference, `churn` is gone.
    assert_eq!(stats.nodes, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_modify_is_atomic_across_tasks() {
    let router = service_router();

    let writer = {
        let router = Arc::clone(&router);
        tokio::spawn(async move {
            for round in 0..WRITES {
                let name = if round % 2 == 0 { "user-v2" } else { "get-user" };
                router
                    .modify_value("/api/v1/users/*", endpoint(name))
                    .unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let router = Arc::clone(&router);
            tokio::spawn(async move {
                for _ in 0..WRITES {
                    let found = router.resolve("/api/v1/users/7").matched();
                    let name = found.map(|e| e.name);
                    assert!(
                        matches!(name, Some("user-v2") | Some("get-user")),
                        "unexpected resolution {name:?}"
                    );
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    // Odd round count leaves the original value in place.
    assert_eq!(
        router.resolve("/api/v1/users/7").matched(),
        Some(endpoint("get-user"))
    );
}
