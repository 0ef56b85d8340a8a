#![no_main]

use libfuzzer_sys::fuzz_target;

use fedwire_codec::EventEnvelope;

fuzz_target!(|data: &[u8]| {
    let env = EventEnvelope::from_bytes(data);
    let fields = env.fields();
    let payload = env.payload();

    // The single pass and the re-scanning accessors must agree
    match (fields, payload) {
        (Ok(fields), Ok(payload)) => assert_eq!(&fields.payload[..], payload),
        (Err(_), Err(_)) => {}
        (fields, payload) => panic!("fields {:?} disagree with payload {:?}", fields, payload),
    }
    let _ = (env.logical_time(), env.step(), env.source_time());
});
