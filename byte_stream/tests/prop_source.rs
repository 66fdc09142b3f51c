//! Property-based tests for the byte sources and sinks

use byte_stream::{ByteSink, ByteSource, IoSink, IoSource, MemorySink, MemorySource, StreamError};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Read,
    Mark(usize),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => Just(Op::Read),
        1 => (0usize..8).prop_map(Op::Mark),
        1 => Just(Op::Reset),
    ]
}

/// Outcome of a single operation, comparable across source kinds.
#[derive(Debug, PartialEq)]
enum Outcome {
    Byte(Option<u8>),
    Marked,
    Reset,
    NoMark,
    Invalidated(usize),
}

fn apply<S: ByteSource>(source: &mut S, op: &Op) -> Outcome {
    match op {
        Op::Read => Outcome::Byte(source.read_byte().unwrap()),
        Op::Mark(limit) => {
            source.mark(*limit);
            Outcome::Marked
        }
        Op::Reset => match source.reset() {
            Ok(()) => Outcome::Reset,
            Err(StreamError::NoMark) => Outcome::NoMark,
            Err(StreamError::MarkInvalidated { limit }) => Outcome::Invalidated(limit),
            Err(other) => panic!("unexpected error: {other}"),
        },
    }
}

proptest! {
    // -------------------------------------------------------------
    // 1. A plain read-through yields the input followed by end-of-data.
    // -------------------------------------------------------------
    #[test]
    fn prop_read_through(ref data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut source = MemorySource::from_slice(data);
        let mut out = Vec::new();
        while let Some(b) = source.read_byte().unwrap() {
            out.push(b);
        }
        prop_assert_eq!(&out, data);
        prop_assert_eq!(source.read_byte().unwrap(), None);
    }

    // -------------------------------------------------------------
    // 2. Stream-backed and memory-backed sources agree on every
    //    mark/read/reset sequence.
    // -------------------------------------------------------------
    #[test]
    fn prop_io_source_matches_memory_source(
        ref data in prop::collection::vec(any::<u8>(), 0..64),
        ref ops in prop::collection::vec(op_strategy(), 0..128)
    ) {
        let mut memory = MemorySource::from_slice(data);
        let mut stream = IoSource::new(data.as_slice());

        for op in ops {
            prop_assert_eq!(apply(&mut memory, op), apply(&mut stream, op));
        }
    }

    // -------------------------------------------------------------
    // 3. Both sinks record exactly what was written.
    // -------------------------------------------------------------
    #[test]
    fn prop_sinks_agree(ref data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut memory = MemorySink::new();
        let mut stream = IoSink::new(Vec::new());
        for &b in data {
            memory.write_byte(b).unwrap();
            stream.write_byte(b).unwrap();
        }
        memory.close().unwrap();
        stream.close().unwrap();

        prop_assert_eq!(memory.as_slice(), data.as_slice());
        prop_assert_eq!(stream.into_inner(), data.clone());
    }
}
