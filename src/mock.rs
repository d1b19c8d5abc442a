//! Recording I2C bus and delay fakes for unit tests.

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{Error, ErrorKind, ErrorType, I2c, Operation};

/// One recorded bus transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Transfer {
    /// Plain write: pointer byte followed by register data.
    Write { address: u8, bytes: Vec<u8> },
    /// Pointer write followed by a repeated-start read.
    WriteRead { address: u8, register: u8, len: usize },
}

impl Transfer {
    pub fn write(address: u8, register: u8, value: [u8; 2]) -> Self {
        Transfer::Write {
            address,
            bytes: vec![register, value[0], value[1]],
        }
    }

    pub fn read(address: u8, register: u8) -> Self {
        Transfer::WriteRead {
            address,
            register,
            len: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockError;

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Records every transaction and answers reads from a queue.
#[derive(Debug, Default)]
pub struct MockI2c {
    pub transfers: Vec<Transfer>,
    /// Data returned by successive reads; zeros once exhausted.
    pub responses: VecDeque<[u8; 2]>,
    /// Zero-based index of the transaction that should fail.
    pub fail_at: Option<usize>,
}

impl MockI2c {
    pub fn with_responses(responses: &[[u8; 2]]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let index = self.transfers.len();
        let fail = self.fail_at == Some(index);

        match operations {
            [Operation::Write(bytes)] => self.transfers.push(Transfer::Write {
                address,
                bytes: bytes.to_vec(),
            }),
            [Operation::Write(pointer), Operation::Read(buf)] => {
                self.transfers.push(Transfer::WriteRead {
                    address,
                    register: pointer[0],
                    len: buf.len(),
                });
                if !fail {
                    let data = self.responses.pop_front().unwrap_or([0, 0]);
                    buf.copy_from_slice(&data);
                }
            }
            _ => panic!("unexpected I2C operation sequence"),
        }

        if fail {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

/// Accumulates requested delay time instead of sleeping.
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
