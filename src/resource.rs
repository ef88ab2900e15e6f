//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct CarRes(domain::Car);

impl Deref for CarRes {
    type Target = domain::Car;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CarRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Car> for CarRes {
    fn from(value: domain::Car) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct ParkingLotRes(domain::ParkingLot);

impl Deref for ParkingLotRes {
    type Target = domain::ParkingLot;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::ParkingLot> for ParkingLotRes {
    fn from(value: domain::ParkingLot) -> Self {
        Self(value)
    }
}

/// Control input of the current frame, written by the controller and consumed by the simulator.
#[derive(Resource, Default)]
pub struct ControlRes(domain::ControlInput);

impl Deref for ControlRes {
    type Target = domain::ControlInput;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ControlRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
