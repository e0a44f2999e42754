use std::sync::Arc;

use wgpu::util::DeviceExt;
use wgpu::{Adapter, Buffer, BufferUsages, Device, DeviceDescriptor, Features, Instance, Limits, Queue};

use crate::error::{CatalogError, Result};
use crate::graph::SceneGraph;

/// Shared GPU device and queue, created without a window.
///
/// Cloning is cheap (Arc), so several uploaders can share one context.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    pub async fn headless() -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = Self::request_adapter(&instance).await?;
        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Blocking wrapper around [`GpuContext::headless`].
    pub fn headless_blocking() -> Result<Self> {
        pollster::block_on(Self::headless())
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    async fn request_adapter(instance: &Instance) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| CatalogError::Gpu(format!("no suitable adapter: {e:?}")))
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("scene-catalog device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| CatalogError::Gpu(format!("device request failed: {e:?}")))
    }
}

/// Destination for instance bytes.
///
/// [`GpuContext`] writes real vertex buffers; tests record calls instead.
pub trait BufferSink {
    type Buffer;

    fn create(&self, label: &str, bytes: &[u8]) -> Self::Buffer;
    fn write(&self, buffer: &Self::Buffer, bytes: &[u8]);
    /// Called once after a sync that wrote anything.
    fn flush(&self) {}
}

impl BufferSink for GpuContext {
    type Buffer = Buffer;

    fn create(&self, label: &str, bytes: &[u8]) -> Buffer {
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytes,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        })
    }

    fn write(&self, buffer: &Buffer, bytes: &[u8]) {
        self.queue.write_buffer(buffer, 0, bytes);
    }

    fn flush(&self) {
        self.queue.submit(std::iter::empty());
    }
}

/// Mirrors every instanced batch of a graph into one GPU buffer each.
///
/// A batch is written only when its dirty flag is up, and the flag is
/// cleared by the write, so each frame costs at most one upload per batch.
pub struct InstanceUploader<S: BufferSink> {
    buffers: Vec<Option<S::Buffer>>,
    uploads: u64,
}

impl<S: BufferSink> InstanceUploader<S> {
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            uploads: 0,
        }
    }

    /// Uploads dirty batches, returning how many were written this call.
    pub fn sync(&mut self, sink: &S, graph: &mut SceneGraph) -> usize {
        let batches = graph.batches_mut();
        if self.buffers.len() < batches.len() {
            self.buffers.resize_with(batches.len(), || None);
        }

        let mut written = 0;
        for (index, batch) in batches.iter_mut().enumerate() {
            let dirty = batch.buffer.take_dirty();
            if batch.buffer.is_empty() {
                continue;
            }
            match &self.buffers[index] {
                None => {
                    let label = format!("instances #{index}");
                    self.buffers[index] = Some(sink.create(&label, batch.buffer.bytes()));
                    written += 1;
                }
                Some(buffer) if dirty => {
                    sink.write(buffer, batch.buffer.bytes());
                    written += 1;
                }
                Some(_) => {}
            }
        }

        if written > 0 {
            sink.flush();
        }
        self.uploads += written as u64;
        written
    }

    /// Total uploads (creations plus writes) since construction.
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn buffer(&self, batch: usize) -> Option<&S::Buffer> {
        self.buffers.get(batch).and_then(Option::as_ref)
    }
}

impl<S: BufferSink> Default for InstanceUploader<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Material, Shape};
    use std::cell::RefCell;

    /// Records creations and writes by batch label index.
    #[derive(Default)]
    struct Recorder {
        created: RefCell<Vec<usize>>,
        writes: RefCell<Vec<usize>>,
        flushes: RefCell<usize>,
    }

    impl BufferSink for Recorder {
        type Buffer = usize;

        fn create(&self, _label: &str, bytes: &[u8]) -> usize {
            let mut created = self.created.borrow_mut();
            created.push(bytes.len());
            created.len() - 1
        }

        fn write(&self, buffer: &usize, _bytes: &[u8]) {
            self.writes.borrow_mut().push(*buffer);
        }

        fn flush(&self) {
            *self.flushes.borrow_mut() += 1;
        }
    }

    fn graph_with(counts: &[usize]) -> SceneGraph {
        let mut graph = SceneGraph::new();
        for &count in counts {
            graph.add_batch(Shape::sphere(0.1), Material::standard(0xffffff), count);
        }
        graph
    }

    #[test]
    fn first_sync_creates_non_empty_buffers() {
        let sink = Recorder::default();
        let mut uploader = InstanceUploader::new();
        let mut graph = graph_with(&[4, 0, 2]);

        assert_eq!(uploader.sync(&sink, &mut graph), 2);
        assert_eq!(*sink.created.borrow(), vec![4 * 64, 2 * 64]);
        assert!(uploader.buffer(1).is_none());
        assert_eq!(*sink.flushes.borrow(), 1);
    }

    #[test]
    fn only_dirty_batches_are_written() {
        let sink = Recorder::default();
        let mut uploader = InstanceUploader::new();
        let mut graph = graph_with(&[3, 3]);
        uploader.sync(&sink, &mut graph);

        assert_eq!(uploader.sync(&sink, &mut graph), 0);
        assert_eq!(*sink.flushes.borrow(), 1);

        graph.batches_mut()[1].buffer.mark_dirty();
        assert_eq!(uploader.sync(&sink, &mut graph), 1);
        assert_eq!(*sink.writes.borrow(), vec![1]);
        assert!(!graph.batches()[1].buffer.is_dirty());
        assert_eq!(uploader.uploads(), 3);
    }
}
