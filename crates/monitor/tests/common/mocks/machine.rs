use std::cell::RefCell;
use std::io::{self, Write};

use rvmon_core::common::{RunState, SimError};
use rvmon_sdb::machine::{DeviceEvents, ExecutionEngine, PhysMemory, ProcessState, RegisterDisplay};

/// A machine that records every call the shell makes.
///
/// Memory reads return the low byte of the address.
#[derive(Debug, Default)]
pub struct FakeMachine {
    pub exec_calls: Vec<u64>,
    pub reads: RefCell<Vec<(u64, usize)>>,
    pub fault_at: Option<u64>,
    pub state: RunState,
    pub events_cleared: usize,
}

impl FakeMachine {
    pub fn reads(&self) -> Vec<(u64, usize)> {
        self.reads.borrow().clone()
    }
}

impl ExecutionEngine for FakeMachine {
    fn cpu_exec(&mut self, n: u64, _out: &mut dyn Write) -> io::Result<()> {
        self.exec_calls.push(n);
        Ok(())
    }
}

impl PhysMemory for FakeMachine {
    fn paddr_read(&self, addr: u64, len: usize) -> Result<u64, SimError> {
        self.reads.borrow_mut().push((addr, len));
        if self.fault_at == Some(addr) {
            return Err(SimError::AddressOutOfBounds {
                addr,
                len,
                base: 0,
                end: 0,
            });
        }
        Ok(addr & 0xFF)
    }
}

impl RegisterDisplay for FakeMachine {
    fn reg_display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<all registers>")
    }

    fn target_reg_display(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        writeln!(out, "<register {name}>")
    }
}

impl ProcessState for FakeMachine {
    fn state(&self) -> RunState {
        self.state
    }

    fn set_state(&mut self, state: RunState) {
        self.state = state;
    }
}

impl DeviceEvents for FakeMachine {
    fn clear_event_queue(&mut self) {
        self.events_cleared += 1;
    }
}
