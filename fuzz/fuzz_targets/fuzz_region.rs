#![no_main]
use std::io;

use arbitrary::Arbitrary;
use bufregion::{BufferedRegion, Error, RegionOptions};
use libfuzzer_sys::fuzz_target;

/// Keeps fuzzed allocations small.
const MAX_CAPACITY: usize = 4096;

#[derive(Debug, Arbitrary)]
enum Op {
    Fill,
    Peek { start: u16, stop: u16 },
    Clear(u16),
    Grow(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    options: RegionOptions,
    chunks: Vec<Vec<u8>>,
    ops: Vec<Op>,
}

/// Replays `chunks` one per read, then reports end-of-stream.
struct Chunks {
    chunks: std::vec::IntoIter<Vec<u8>>,
}

impl io::Read for Chunks {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(chunk) = self.chunks.next() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        Ok(n)
    }
}

fn run(input: Input) {
    let options = RegionOptions {
        capacity: input.options.capacity % MAX_CAPACITY,
        ..input.options
    };
    let stream = Chunks {
        chunks: input.chunks.into_iter(),
    };
    let mut region = BufferedRegion::with_options(stream, options);
    // Shadow copy of the valid bytes.
    let mut model: Vec<u8> = Vec::new();

    for op in input.ops {
        match op {
            Op::Fill => {
                let before = region.buffered();
                match region.fill() {
                    Ok(read) => {
                        assert_eq!(region.buffered(), before + read);
                        model.extend_from_slice(&region.data()[before..]);
                    }
                    Err(Error::EndOfStream) => assert_eq!(region.buffered(), before),
                    Err(err) => panic!("in-memory stream failed: {err}"),
                }
            }
            Op::Peek { start, stop } => {
                let (start, stop) = (usize::from(start), usize::from(stop));
                let view = region.peek(start, stop);
                let expected_some =
                    start <= region.buffered() && start <= stop && stop <= region.capacity();
                assert_eq!(view.is_some(), expected_some);
                if let Some(view) = view {
                    let valid_end = stop.min(region.buffered());
                    assert_eq!(&view[..valid_end - start], &model[start..valid_end]);
                }
            }
            Op::Clear(position) => {
                let position = usize::from(position);
                match region.clear(position) {
                    Ok(()) => {
                        model.drain(..position.min(model.len()));
                    }
                    Err(Error::InvalidPosition { .. }) => assert!(position > region.capacity()),
                    Err(err) => panic!("unexpected clear error: {err}"),
                }
            }
            Op::Grow(extra) => {
                let capacity = region.capacity();
                region.grow(usize::from(extra));
                assert_eq!(region.capacity(), capacity + usize::from(extra));
            }
        }
        assert!(region.buffered() <= region.capacity());
        assert_eq!(region.data(), &model[..]);
    }
}

fuzz_target!(|input: Input| run(input));
