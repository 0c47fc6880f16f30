//! Simulated bus for host tests
//!
//! [`SimBus`] implements [`BusPins`] and plays the role of a target device:
//! it decodes START/STOP conditions and clocked bytes from the master's line
//! changes, answers acknowledge polls, and shifts out queued read data.

use std::collections::VecDeque;
use std::vec::Vec;

use softwire_hal::{BusPins, Direction};

/// What the simulated target saw on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// SDA fell while SCL was high, bus idle before
    Start,
    /// SDA fell while SCL was high, no STOP since the last START
    RepeatedStart,
    /// SDA rose while SCL was high
    Stop,
    /// Master clocked out a byte
    Write(u8),
    /// Target clocked out a byte
    Read(u8),
    /// Master acknowledged a read byte
    MasterAck,
    /// Master did not acknowledge a read byte
    MasterNack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Master drives SDA, `bits` clocked so far
    Write { bits: u8, shift: u8 },
    /// Eight bits written, waiting for the master to release SDA
    AwaitAck,
    /// Target answers the acknowledge poll
    Ack { pull_low: bool, samples: u32 },
    /// Target drives data bits
    Read { byte: u8, clocked: u8 },
    /// Master drives the ninth clock after a read
    MasterAck,
}

/// One level change requested by the master
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// SDA driven to the level
    Sda(bool),
    /// SCL driven to the level
    Scl(bool),
}

/// Simulated target attached to a bit-banged bus
pub struct SimBus {
    scl: bool,
    sda_latch: bool,
    sda_output: bool,
    phase: Phase,
    /// START seen without a STOP after it
    in_transaction: bool,
    /// Acknowledge answer per address/data byte, front first
    pub acks: VecDeque<bool>,
    /// Answer once `acks` is exhausted
    pub default_ack: bool,
    /// High samples the target lets pass before pulling SDA low
    pub ack_latency: u32,
    /// Bytes the target sends on reads, 0xFF once empty
    pub read_data: VecDeque<u8>,
    /// Decoded bus activity
    pub events: Vec<Event>,
    /// Every `set_sda`/`set_scl` call, in order
    pub lines: Vec<Line>,
    /// Rising SCL edges
    pub scl_rises: u32,
    /// SDA samples taken during acknowledge phases
    pub ack_samples: u32,
    /// Every delay requested, in order
    pub delays: Vec<u32>,
}

impl SimBus {
    /// Idle bus with a target that acknowledges everything
    pub fn new() -> Self {
        Self {
            scl: true,
            sda_latch: true,
            sda_output: true,
            phase: Phase::Write { bits: 0, shift: 0 },
            in_transaction: false,
            acks: VecDeque::new(),
            default_ack: true,
            ack_latency: 0,
            read_data: VecDeque::new(),
            events: Vec::new(),
            lines: Vec::new(),
            scl_rises: 0,
            ack_samples: 0,
            delays: Vec::new(),
        }
    }

    /// Bus with no target: every acknowledge wait times out
    pub fn absent() -> Self {
        let mut sim = Self::new();
        sim.default_ack = false;
        sim
    }

    /// Queue bytes for the target to send
    pub fn with_read_data(mut self, data: &[u8]) -> Self {
        self.read_data.extend(data.iter().copied());
        self
    }

    /// Script the acknowledge answers
    pub fn with_acks(mut self, acks: &[bool]) -> Self {
        self.acks.extend(acks.iter().copied());
        self
    }

    /// SCL level
    pub fn scl(&self) -> bool {
        self.scl
    }

    /// SDA level as seen on the wire
    pub fn sda(&self) -> bool {
        if self.sda_output {
            self.sda_latch
        } else {
            match self.phase {
                Phase::Ack { pull_low, .. } => !pull_low,
                _ => true,
            }
        }
    }

    /// Whether the master currently drives SDA
    pub fn sda_is_output(&self) -> bool {
        self.sda_output
    }

    /// Both lines high with SDA driven by the master
    pub fn is_idle(&self) -> bool {
        self.scl && self.sda_latch && self.sda_output
    }

    /// Bytes written by the master, in order
    pub fn written(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    fn next_ack(&mut self) -> bool {
        self.acks.pop_front().unwrap_or(self.default_ack)
    }
}

impl BusPins for SimBus {
    fn set_sda(&mut self, high: bool) {
        self.lines.push(Line::Sda(high));
        if self.sda_output && self.scl && high != self.sda_latch {
            let event = if high {
                Event::Stop
            } else if self.in_transaction {
                Event::RepeatedStart
            } else {
                Event::Start
            };
            self.in_transaction = !high;
            self.events.push(event);
            self.phase = Phase::Write { bits: 0, shift: 0 };
        }
        self.sda_latch = high;
    }

    fn set_scl(&mut self, high: bool) {
        self.lines.push(Line::Scl(high));
        let rising = high && !self.scl;
        self.scl = high;
        if !rising {
            return;
        }
        self.scl_rises += 1;

        if self.sda_output {
            match self.phase {
                Phase::Write { bits, shift } => {
                    let shift = (shift << 1) | u8::from(self.sda_latch);
                    let bits = bits + 1;
                    if bits == 8 {
                        self.events.push(Event::Write(shift));
                        self.phase = Phase::AwaitAck;
                    } else {
                        self.phase = Phase::Write { bits, shift };
                    }
                }
                Phase::MasterAck => {
                    self.events.push(if self.sda_latch {
                        Event::MasterNack
                    } else {
                        Event::MasterAck
                    });
                    self.phase = Phase::Write { bits: 0, shift: 0 };
                }
                _ => {}
            }
        } else if let Phase::Read { byte, clocked } = self.phase {
            self.phase = Phase::Read {
                byte,
                clocked: clocked + 1,
            };
        }
    }

    fn read_sda(&mut self) -> bool {
        if self.sda_output {
            return self.sda_latch;
        }
        match self.phase {
            Phase::Ack { pull_low, samples } => {
                self.ack_samples += 1;
                let samples = samples + 1;
                self.phase = Phase::Ack { pull_low, samples };
                !(pull_low && samples > self.ack_latency)
            }
            Phase::Read { byte, clocked } if (1..=8).contains(&clocked) => {
                byte & (0x80 >> (clocked - 1)) != 0
            }
            _ => true,
        }
    }

    fn set_sda_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Input if self.sda_output => {
                self.sda_output = false;
                self.phase = if self.phase == Phase::AwaitAck {
                    Phase::Ack {
                        pull_low: self.next_ack(),
                        samples: 0,
                    }
                } else {
                    Phase::Read {
                        byte: self.read_data.pop_front().unwrap_or(0xFF),
                        clocked: 0,
                    }
                };
            }
            Direction::Output if !self.sda_output => {
                self.sda_output = true;
                self.phase = match self.phase {
                    Phase::Read { byte, .. } => {
                        self.events.push(Event::Read(byte));
                        Phase::MasterAck
                    }
                    _ => Phase::Write { bits: 0, shift: 0 },
                };
            }
            _ => {}
        }
    }

    fn delay(&mut self, ticks: u32) {
        self.delays.push(ticks);
    }
}
