//! Mock interface implementation for testing the LSM6DSOX driver

use device_driver::RegisterInterface;
use lsm6dsox_node::registers::addr;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Word offset between consecutive registers
const STRIDE: u16 = 0x0100;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u16,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u16,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u16, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Values served by successive `STATUS_REG` reads before falling back
    /// to the register file
    status_queue: VecDeque<u8>,

    /// Sensor data sequences for simulating sensor readings
    accel_sequence: Vec<[i16; 3]>,
    accel_sequence_idx: usize,

    gyro_sequence: Vec<[i16; 3]>,
    gyro_sequence_idx: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            status_queue: VecDeque::new(),
            accel_sequence: Vec::new(),
            accel_sequence_idx: 0,
            gyro_sequence: Vec::new(),
            gyro_sequence_idx: 0,
        };

        // Set default WHO_AM_I value (0x6C)
        state.registers.insert(addr::WHO_AM_I, 0x6C);

        state
    }

    /// Advance accelerometer sequence and update registers
    fn advance_accel_sequence(&mut self) {
        if !self.accel_sequence.is_empty() {
            let [x, y, z] = self.accel_sequence[self.accel_sequence_idx];
            self.set_axes(addr::OUTX_L_A, [x, y, z]);
            self.accel_sequence_idx = (self.accel_sequence_idx + 1) % self.accel_sequence.len();
        }
    }

    /// Advance gyroscope sequence and update registers
    fn advance_gyro_sequence(&mut self) {
        if !self.gyro_sequence.is_empty() {
            let [x, y, z] = self.gyro_sequence[self.gyro_sequence_idx];
            self.set_axes(addr::OUTX_L_G, [x, y, z]);
            self.gyro_sequence_idx = (self.gyro_sequence_idx + 1) % self.gyro_sequence.len();
        }
    }

    /// Store three little-endian axis words starting at `first`
    fn set_axes(&mut self, first: u16, values: [i16; 3]) {
        let mut address = first;
        for value in values {
            let [low, high] = value.to_le_bytes();
            self.registers.insert(address, low);
            self.registers.insert(address + STRIDE, high);
            address += 2 * STRIDE;
        }
    }

    fn read_one(&mut self, address: u16) -> u8 {
        if address == addr::OUTX_L_A {
            self.advance_accel_sequence();
        }
        if address == addr::OUTX_L_G {
            self.advance_gyro_sequence();
        }

        if address == addr::STATUS_REG {
            if let Some(status) = self.status_queue.pop_front() {
                return status;
            }
        }

        self.registers.get(&address).copied().unwrap_or(0)
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u16, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u16) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set WHO_AM_I register value
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(addr::WHO_AM_I, value);
    }

    /// Set STATUS_REG value
    pub fn set_status(&self, value: u8) {
        self.set_register(addr::STATUS_REG, value);
    }

    /// Queue STATUS_REG values, one per read
    pub fn queue_status(&self, values: &[u8]) {
        self.state
            .borrow_mut()
            .status_queue
            .extend(values.iter().copied());
    }

    /// Set WAKE_UP_SRC value
    pub fn set_wake_up_src(&self, value: u8) {
        self.set_register(addr::WAKE_UP_SRC, value);
    }

    /// Set accelerometer data (will be returned on next read)
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axes(addr::OUTX_L_A, [x, y, z]);
    }

    /// Set a sequence of accelerometer readings
    pub fn set_accel_sequence(&self, sequence: Vec<[i16; 3]>) {
        let mut state = self.state.borrow_mut();
        state.accel_sequence = sequence;
        state.accel_sequence_idx = 0;
    }

    /// Set gyroscope data (will be returned on next read)
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axes(addr::OUTX_L_G, [x, y, z]);
    }

    /// Set gyroscope data sequence
    pub fn set_gyro_sequence(&self, sequence: Vec<[i16; 3]>) {
        let mut state = self.state.borrow_mut();
        state.gyro_sequence = sequence;
        state.gyro_sequence_idx = 0;
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Addresses written, in order
    pub fn written(&self) -> Vec<(u16, u8)> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::WriteRegister { address, value } => Some((*address, *value)),
                Operation::ReadRegister { .. } => None,
            })
            .collect()
    }

    /// Addresses read, in order
    pub fn read_addresses(&self) -> Vec<u16> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::ReadRegister { address, .. } => Some(*address),
                Operation::WriteRegister { .. } => None,
            })
            .collect()
    }

    /// Verify a register was written with expected value
    pub fn verify_register(&self, address: u16, expected: u8) -> bool {
        self.get_register(address) == expected
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u16;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        let mut reg_addr = address;
        for byte in read_data.iter_mut() {
            *byte = state.read_one(reg_addr);
            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
            reg_addr = reg_addr.wrapping_add(STRIDE);
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        let mut reg_addr = address;
        for &byte in write_data {
            state.registers.insert(reg_addr, byte);
            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });
            reg_addr = reg_addr.wrapping_add(STRIDE);
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
