#![no_main]

use std::sync::mpsc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

use libfuzzer_sys::fuzz_target;

mod utils;

const TIMEOUT: Duration = Duration::from_secs(1);

struct Runner {
    input_tx: mpsc::SyncSender<Vec<u8>>,
    output_rx: Mutex<mpsc::Receiver<()>>,
}

fn check(input: &[u8]) {
    let cap = input.len().min(utils::MAX_INPUT_SIZE);
    let Ok(map) = namemap_srg::parse_srg(&input[..cap]) else {
        return;
    };

    // Anything that parses must survive a write/reparse cycle unchanged.
    let written = map.to_srg_string();
    let reparsed = namemap_srg::parse_srg_str(&written).expect("written mappings must reparse");
    assert_eq!(reparsed, map, "round trip changed the mapping table");
}

fn runner() -> &'static Runner {
    static RUNNER: OnceLock<Runner> = OnceLock::new();
    RUNNER.get_or_init(|| {
        let (input_tx, input_rx) = mpsc::sync_channel::<Vec<u8>>(0);
        let (output_tx, output_rx) = mpsc::sync_channel::<()>(0);

        std::thread::spawn(move || {
            for input in input_rx {
                check(&input);
                let _ = output_tx.send(());
            }
        });

        Runner {
            input_tx,
            output_rx: Mutex::new(output_rx),
        }
    })
}

fuzz_target!(|data: &[u8]| {
    let runner = runner();
    runner
        .input_tx
        .send(data.to_vec())
        .expect("fuzz_srg_parse worker thread exited");

    match runner
        .output_rx
        .lock()
        .expect("fuzz_srg_parse worker receiver poisoned")
        .recv_timeout(TIMEOUT)
    {
        Ok(()) => {}
        Err(mpsc::RecvTimeoutError::Timeout) => panic!("fuzz_srg_parse fuzz target timed out"),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            panic!("fuzz_srg_parse worker thread panicked")
        }
    }
});
