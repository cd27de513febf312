// tests/test_hrw_basic.rs

//! Selector behaviour on concrete inputs
//! - known orders for fixed keys (32 / 64 bit, murmur3 / blake2b)
//! - determinism, single element, empty slice
//! - every built-in candidate kind

use std::borrow::Cow;

use bytes::Bytes;
use rvh_unihrw::{
    hrw_sort32, hrw_sort64, select_owner32, weight_map32, Blake2b32, Blake2b64, Candidate,
    HasherConfig, Murmur32, Murmur64,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Server {
    name: &'static str,
    port: u16,
}

impl Candidate for Server {
    fn raw(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self.name.as_bytes()))
    }
}

fn servers() -> Vec<Server> {
    ["alpha", "beta", "gamma", "delta"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Server {
            name,
            port: 60_000 - i as u16,
        })
        .collect()
}

#[test]
fn text_scenario_k1() {
    init_tracing();
    let mut nodes = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    let mut h = Murmur32::new(0);
    hrw_sort32(&mut nodes, b"k1", &mut h).unwrap();
    assert_eq!(nodes, ["b", "c", "a"]);

    // same hasher instance, same answer
    let mut again = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    hrw_sort32(&mut again, b"k1", &mut h).unwrap();
    assert_eq!(again, nodes);
}

#[test]
fn known_orders_other_widths_and_hashers() {
    let mut m64 = vec!["a", "b", "c"];
    hrw_sort64(&mut m64, b"k1", &mut Murmur64::new(0)).unwrap();
    assert_eq!(m64, ["c", "b", "a"]);

    let mut b32 = vec!["c", "b", "a"];
    hrw_sort32(&mut b32, b"user:42", &mut Blake2b32::new(0)).unwrap();
    assert_eq!(b32, ["b", "a", "c"]);

    let mut b64 = vec!["b", "c", "a"];
    hrw_sort64(&mut b64, b"user:42", &mut Blake2b64::new(0)).unwrap();
    assert_eq!(b64, ["c", "a", "b"]);
}

#[test]
fn integer_shards() {
    let mut shards: Vec<u64> = (0..10).rev().collect();
    hrw_sort32(&mut shards, b"user:42", &mut Murmur32::new(0)).unwrap();
    assert_eq!(shards, [6, 3, 0, 5, 2, 4, 1, 9, 8, 7]);

    let mut shards: Vec<i32> = (0..10).collect();
    hrw_sort64(&mut shards, b"user:42", &mut Murmur64::new(0)).unwrap();
    assert_eq!(shards, [7, 9, 0, 2, 1, 3, 5, 4, 6, 8]);
}

#[test]
fn rawer_objects_use_weight_order() {
    init_tracing();
    let mut h = Murmur32::new(0);

    // weights: gamma < beta < alpha < delta
    let canonical = weight_map32(&servers(), &mut h).unwrap();
    let order = canonical.ascending_order();
    let names: Vec<_> = order.iter().map(|&i| servers()[i].name).collect();
    assert_eq!(names, ["gamma", "beta", "alpha", "delta"]);

    let mut work = servers();
    hrw_sort32(&mut work, b"k1", &mut h).unwrap();
    let names: Vec<_> = work.iter().map(|s| s.name).collect();
    assert_eq!(names, ["delta", "alpha", "gamma", "beta"]);

    // items move whole, payload included
    assert_eq!(work[0].port, 59_997);
}

#[test]
fn colliding_weights_do_not_depend_on_input_order() {
    let mut h = Murmur32::new(0);
    let a = Server { name: "node-53119", port: 1 };
    let b = Server { name: "node-70603", port: 2 };
    let z = Server { name: "zzz", port: 3 };

    // murmur3_32 seed 0 maps both names to the same weight
    let map = weight_map32(&[a.clone(), b.clone()], &mut h).unwrap();
    assert_eq!(map[0], 0x534f_0d76);
    assert_eq!(map[0], map[1]);

    let inputs = [
        vec![a.clone(), b.clone(), z.clone()],
        vec![b.clone(), a.clone(), z.clone()],
        vec![z.clone(), b.clone(), a.clone()],
    ];
    for k in 0..100 {
        let key = format!("k{k}");
        let orders: Vec<Vec<Server>> = inputs
            .iter()
            .map(|input| {
                let mut work = input.clone();
                hrw_sort32(&mut work, key.as_bytes(), &mut h).unwrap();
                work
            })
            .collect();
        assert_eq!(orders[0], orders[1], "key {key}");
        assert_eq!(orders[0], orders[2], "key {key}");
    }

    let mut work = vec![b.clone(), z.clone(), a.clone()];
    hrw_sort32(&mut work, b"k1", &mut h).unwrap();
    assert_eq!(work, [b, z, a]);
}

#[test]
fn canonical_order_ignores_key() {
    let mut h = Murmur32::new(0);
    for k in 0..20 {
        let key = format!("shard-{k}");
        let mut work = servers();
        work.rotate_left(k % 4);
        hrw_sort32(&mut work, key.as_bytes(), &mut h).unwrap();

        // the empty key yields pivot 0, which leaves the canonical order in place
        hrw_sort32(&mut work, b"", &mut h).unwrap();
        let names: Vec<_> = work.iter().map(|s| s.name).collect();
        assert_eq!(names, ["gamma", "beta", "alpha", "delta"], "key {key}");
    }

    let mut direct = servers();
    Server::canonical_sort(&mut direct, |d| rvh_unihrw::digest32(&mut h, d)).unwrap();
    let names: Vec<_> = direct.iter().map(|s| s.name).collect();
    assert_eq!(names, ["gamma", "beta", "alpha", "delta"]);
}

#[test]
fn byte_kinds_agree_with_text() {
    let mut h = Murmur32::new(0);
    let text = ["node-1", "node-7", "node-3", "node-9", "node-2"];

    let mut strs = text.to_vec();
    hrw_sort32(&mut strs, b"object", &mut h).unwrap();

    let mut vecs: Vec<Vec<u8>> = text.iter().map(|s| s.as_bytes().to_vec()).collect();
    hrw_sort32(&mut vecs, b"object", &mut h).unwrap();

    let mut slices: Vec<&[u8]> = text.iter().map(|s| s.as_bytes()).collect();
    hrw_sort32(&mut slices, b"object", &mut h).unwrap();

    let mut shared: Vec<Bytes> = text.iter().map(|s| Bytes::from_static(s.as_bytes())).collect();
    hrw_sort32(&mut shared, b"object", &mut h).unwrap();

    let mut boxed: Vec<Box<str>> = text.iter().map(|s| Box::<str>::from(*s)).collect();
    hrw_sort32(&mut boxed, b"object", &mut h).unwrap();

    for i in 0..text.len() {
        assert_eq!(vecs[i], strs[i].as_bytes());
        assert_eq!(slices[i], strs[i].as_bytes());
        assert_eq!(&shared[i][..], strs[i].as_bytes());
        assert_eq!(&*boxed[i], strs[i]);
    }
}

#[test]
fn single_element_is_untouched() {
    for key in [&b""[..], &b"k1"[..], &b"anything at all"[..]] {
        let mut one = vec!["only".to_string()];
        hrw_sort32(&mut one, key, &mut Murmur32::new(9)).unwrap();
        assert_eq!(one, ["only"]);

        let mut one = servers()[..1].to_vec();
        hrw_sort64(&mut one, key, &mut Blake2b64::new(9)).unwrap();
        assert_eq!(one, servers()[..1]);
    }
}

#[test]
fn empty_slice_is_ok() {
    let mut none: Vec<Server> = Vec::new();
    hrw_sort32(&mut none, b"k1", &mut Murmur32::new(0)).unwrap();
    assert!(none.is_empty());
    assert_eq!(select_owner32(&mut none, b"k1", &mut Murmur32::new(0)).unwrap(), None);
}

#[test]
fn empty_key_with_zero_seed_keeps_canonical_order() {
    // murmur3("", 0) == 0 and finalize(0) == 0, so every offset is 0
    let mut nodes = vec!["c", "a", "d", "b"];
    hrw_sort32(&mut nodes, b"", &mut Murmur32::new(0)).unwrap();
    assert_eq!(nodes, ["a", "b", "c", "d"]);
}

#[test]
fn configured_hasher_drives_selector() {
    let cfg: HasherConfig = serde_json::from_str(r#"{"algorithm":"blake2b"}"#).unwrap();
    let mut boxed = cfg.build32();
    let mut nodes = vec!["c", "b", "a"];
    hrw_sort32(&mut nodes, b"user:42", &mut boxed).unwrap();
    assert_eq!(nodes, ["b", "a", "c"]);
}

#[test]
fn seed_changes_assignment_somewhere() {
    let base: Vec<String> = (0..8).map(|i| format!("10.0.0.{i}:4000")).collect();
    let differs = (0..64).any(|k| {
        let key = format!("obj-{k}");
        let mut a = base.clone();
        let mut b = base.clone();
        hrw_sort32(&mut a, key.as_bytes(), &mut Murmur32::new(1)).unwrap();
        hrw_sort32(&mut b, key.as_bytes(), &mut Murmur32::new(2)).unwrap();
        a[0] != b[0]
    });
    assert!(differs);
}
