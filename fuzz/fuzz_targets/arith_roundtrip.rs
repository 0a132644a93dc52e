#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // stay under the total-frequency precision bound
    if data.len() >= arith::MAX_TOTAL as usize {
        return;
    }

    let blob = arith::compress(data).unwrap();
    let restored = arith::decompress(&blob).unwrap();
    assert_eq!(data, restored.as_slice());

    // feeding the codec its own output back as a message must also hold
    if blob.len() < arith::MAX_TOTAL as usize {
        let blob2 = arith::compress(&blob).unwrap();
        assert_eq!(arith::decompress(&blob2).unwrap(), blob);
    }
});
