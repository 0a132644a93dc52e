use arith::{decode, encode, Model};

fn main() {
    let message: Vec<u8> = (0..10_000u32)
        .map(|i| match i % 10 {
            0 => b'b',
            1..=2 => b'c',
            _ => b'a',
        })
        .collect();
    let model = Model::build(&message).unwrap();

    for _ in 0..1000 {
        let bits = encode(&model, &message).unwrap();
        let restored = decode(&model, &bits).unwrap();
        assert_eq!(restored, message);
    }
}
