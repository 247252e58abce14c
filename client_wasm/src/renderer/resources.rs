use super::instances::InstanceData;
use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instances allocated up front; grows when a scene needs more
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Reallocate the instance buffer if `needed` does not fit
pub fn ensure_instance_capacity(device: &Device, buffers: &mut GameBuffers, needed: usize) {
    if needed <= buffers.capacity {
        return;
    }
    let capacity = needed.next_power_of_two();
    tracing::debug!(from = buffers.capacity, to = capacity, "growing instance buffer");
    buffers.instances = create_instance_buffer(device, capacity);
    buffers.capacity = capacity;
}

pub fn write_camera(queue: &Queue, buffers: &GameBuffers, camera: &Camera) {
    let camera_uniform = CameraUniform::from_camera(camera);
    queue.write_buffer(&buffers.camera, 0, bytemuck::bytes_of(&camera_uniform));
}
