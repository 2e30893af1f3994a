//! Sampling orchestrator
//!
//! [`SensorNode`] owns the sensor driver, the transmitter, the battery
//! monitor and the wake signal, and runs the node's state machine:
//!
//! ```text
//! Configuring -> Waiting -> Sampling <-> Reporting
//!                   ^          |
//!                   |          v
//!                   +------ Sleeping
//! ```
//!
//! While the wake line reports motion the node streams 12-byte motion
//! reports, one per new gyroscope sample. When the line is released the node
//! sends one telemetry packet, stands by and waits for the next wake-up.
//!
//! Every fault is returned to the caller. [`SensorNode::run`] only ever
//! returns an error; what to do with it (halt, reboot) is up to the
//! application.

use core::convert::Infallible;

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::Error as _;

use crate::activity::WakeSignal;
use crate::config::NodeConfig;
use crate::device::Lsm6dsoxDriver;
use crate::radio::{DiagnosticPing, Radio, TransmitOutcome, Transmitter};
use crate::sensors::{AccelDataG, GyroDataDps, MotionSample};
use crate::telemetry::{BatteryMonitor, TelemetryReading};
use crate::Error;

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NodeState {
    /// Sensor not yet configured
    Configuring,
    /// Blocked until the wake signal reports activity
    Waiting,
    /// Polling for a new gyroscope sample
    Sampling,
    /// A motion sample is ready to send
    Reporting,
    /// Motion ended; telemetry and standby pending
    Sleeping,
}

/// Battery-powered motion sensor node
pub struct SensorNode<I, R, B, W, D> {
    driver: Lsm6dsoxDriver<I>,
    transmitter: Transmitter<R>,
    battery: B,
    wake: W,
    delay: D,
    config: NodeConfig,
    state: NodeState,
    last_sample: MotionSample,
    last_outcome: Option<TransmitOutcome>,
}

impl<I, R, B, W, D> SensorNode<I, R, B, W, D>
where
    I: RegisterInterface<AddressType = u16>,
    R: Radio,
    B: BatteryMonitor,
    W: WakeSignal,
    D: DelayNs,
{
    /// Create a node in the [`NodeState::Configuring`] state
    pub fn new(
        driver: Lsm6dsoxDriver<I>,
        transmitter: Transmitter<R>,
        battery: B,
        wake: W,
        delay: D,
        config: NodeConfig,
    ) -> Self {
        Self {
            driver,
            transmitter,
            battery,
            wake,
            delay,
            config,
            state: NodeState::Configuring,
            last_sample: MotionSample::default(),
            last_outcome: None,
        }
    }

    /// Run one state and return the state the node moved to
    ///
    /// # Errors
    ///
    /// Returns the first fault hit while running the state. The node stays in
    /// the state that failed.
    pub fn step(&mut self) -> Result<NodeState, Error<I::Error>> {
        let next = match self.state {
            NodeState::Configuring => self.configure()?,
            NodeState::Waiting => self.wait()?,
            NodeState::Sampling => self.sample()?,
            NodeState::Reporting => self.report()?,
            NodeState::Sleeping => self.sleep()?,
        };

        #[cfg(feature = "defmt")]
        if next != self.state {
            defmt::debug!("Node {} -> {}", self.state, next);
        }

        self.state = next;
        Ok(next)
    }

    /// Run the state machine until a fault occurs
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the node.
    pub fn run(&mut self) -> Result<Infallible, Error<I::Error>> {
        loop {
            if let Err(e) = self.step() {
                #[cfg(feature = "defmt")]
                defmt::error!("Node stopped in state {}", self.state);
                return Err(e);
            }
        }
    }

    fn configure(&mut self) -> Result<NodeState, Error<I::Error>> {
        self.driver.verify_device()?;
        self.driver.configure(&self.config.device)?;
        let outcome = self
            .transmitter
            .ping::<I::Error>(DiagnosticPing::Configured)?;
        self.last_outcome = Some(outcome);
        Ok(NodeState::Waiting)
    }

    fn wait(&mut self) -> Result<NodeState, Error<I::Error>> {
        self.wake
            .wait_for_activity()
            .map_err(|e| Error::WakeLine(e.kind()))?;
        Ok(NodeState::Sampling)
    }

    fn sample(&mut self) -> Result<NodeState, Error<I::Error>> {
        let active = self
            .wake
            .is_active()
            .map_err(|e| Error::WakeLine(e.kind()))?;
        if !active {
            return Ok(NodeState::Sleeping);
        }

        let status = self.driver.data_ready_status()?;
        if !status.gyro {
            return Ok(NodeState::Sampling);
        }

        // The accelerometer runs faster than the gyroscope, but if it has
        // nothing new the previous triple goes out again.
        let accel_raw = if status.accel {
            self.driver.read_accel_raw()?
        } else {
            self.last_sample.accel_raw
        };
        let gyro_raw = self.driver.read_gyro_raw()?;

        self.last_sample = MotionSample {
            accel_raw,
            gyro_raw,
            accel: AccelDataG::from_raw(&accel_raw, self.driver.accel_scale()),
            gyro: GyroDataDps::from_raw(&gyro_raw, self.driver.gyro_scale()),
        };
        Ok(NodeState::Reporting)
    }

    fn report(&mut self) -> Result<NodeState, Error<I::Error>> {
        let payload = self.last_sample.to_payload();
        let outcome = self.transmitter.send::<I::Error>(&payload)?;
        self.last_outcome = Some(outcome);
        Ok(NodeState::Sampling)
    }

    fn sleep(&mut self) -> Result<NodeState, Error<I::Error>> {
        let reading = TelemetryReading::read(&mut self.battery);
        let outcome = self.transmitter.send::<I::Error>(&reading.to_payload())?;
        self.last_outcome = Some(outcome);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Telemetry {=u16} mV {=i16} C, standby {=u32} s",
            reading.millivolts,
            reading.temperature_c,
            self.config.standby_seconds
        );

        for _ in 0..self.config.standby_seconds {
            self.delay.delay_ms(1000);
        }
        Ok(NodeState::Waiting)
    }

    /// Current state
    pub const fn state(&self) -> NodeState {
        self.state
    }

    /// Most recent motion sample (all zero before the first one)
    pub const fn last_sample(&self) -> &MotionSample {
        &self.last_sample
    }

    /// Outcome of the most recent radio send
    pub const fn last_outcome(&self) -> Option<TransmitOutcome> {
        self.last_outcome
    }

    /// Node configuration
    pub const fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The packet transmitter
    pub const fn transmitter(&self) -> &Transmitter<R> {
        &self.transmitter
    }

    /// The sensor driver
    pub const fn driver(&self) -> &Lsm6dsoxDriver<I> {
        &self.driver
    }

    /// Consume the node and return its parts
    pub fn release(self) -> (Lsm6dsoxDriver<I>, Transmitter<R>, B, W, D) {
        (
            self.driver,
            self.transmitter,
            self.battery,
            self.wake,
            self.delay,
        )
    }
}
