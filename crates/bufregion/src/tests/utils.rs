use std::{collections::VecDeque, io};

/// A reader that answers each `read` with the next scripted step.
///
/// Once the script runs out every read returns `Ok(0)`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedReader {
    steps: VecDeque<Step>,
    pub(crate) reads: usize,
    pub(crate) last_request: Option<usize>,
}

#[derive(Debug)]
pub(crate) enum Step {
    Bytes(Vec<u8>),
    Fail(io::ErrorKind),
}

impl ScriptedReader {
    pub(crate) fn chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self {
            steps: chunks
                .into_iter()
                .map(|c| Step::Bytes(c.as_ref().to_vec()))
                .collect(),
            ..Default::default()
        }
    }

    pub(crate) fn then_fail(mut self, kind: io::ErrorKind) -> Self {
        self.steps.push_back(Step::Fail(kind));
        self
    }
}

impl io::Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        self.last_request = Some(buf.len());
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
            Some(Step::Bytes(mut bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    self.steps.push_front(Step::Bytes(bytes.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}
