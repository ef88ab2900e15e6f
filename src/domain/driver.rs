//! Frame driver running the car without a window.
//!
//! Every frame collects the input, advances the car by exactly one tick and hands the new pose to
//! the renderer, in this order.

use super::{Car, ControlInput, Motion};

pub trait InputSource {
    fn collect_input(&mut self) -> ControlInput;
}

pub trait Renderer {
    fn render(&mut self, car: &Car);
}

pub struct Driver<I, R> {
    car: Car,
    input: I,
    renderer: R,
    frames: u64,
}

impl<I: InputSource, R: Renderer> Driver<I, R> {
    pub fn new(car: Car, input: I, renderer: R) -> Self {
        Self {
            car,
            input,
            renderer,
            frames: 0,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn step(&mut self) -> Motion {
        let input = self.input.collect_input();
        let motion = self.car.advance(&input);
        self.renderer.render(&self.car);
        self.frames += 1;
        motion
    }

    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }
}
