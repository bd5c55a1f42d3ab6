//! Headless-Implementierung der Karten-Capabilities.
//!
//! Bildet `MapSurface` und `MarkerFactory` rein im Speicher ab: für
//! Tests, Demos und Host-seitige Trockenläufe ohne Karten-Widget.
//! Overlays und Anker werden mit ihren Eingaben aufgezeichnet und sind
//! über Abfrage-Methoden einsehbar; per Fehlerinjektion lässt sich ein
//! noch nicht bereiter Karten-Host simulieren.

use std::collections::HashMap;

use crate::core::LatLng;
use crate::engine::{
    AnchorHandle, AnchorStyle, ClickSubscription, FillStyle, MapSurface, MarkerFactory,
    OverlayHandle, ResourceError, StrokeStyle,
};

/// Art eines aufgezeichneten Overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Offener Linienzug (Distanzmessung)
    Polyline,
    /// Implizit geschlossener Ring (Flächenmessung)
    Polygon,
}

/// Aufgezeichnetes Overlay mit seiner aktuellen Vertex-Liste.
#[derive(Debug, Clone)]
pub struct RecordedOverlay {
    /// Polyline oder Polygon
    pub kind: OverlayKind,
    /// Vertex-Liste in Einfüge-Reihenfolge
    pub vertices: Vec<LatLng>,
}

/// In-Memory-Kartenoberfläche ohne Rendering.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    next_id: u64,
    overlays: HashMap<u64, RecordedOverlay>,
    subscriptions: Vec<u64>,
    /// Fehlerinjektion: alle Overlay-Operationen schlagen fehl
    pub fail_overlay_ops: bool,
    /// Fehlerinjektion: `subscribe_clicks` schlägt fehl
    pub fail_subscribe: bool,
}

impl HeadlessSurface {
    /// Erstellt eine leere Oberfläche.
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Anzahl existierender Overlays.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Anzahl aktiver Klick-Abonnements.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Aufgezeichnetes Overlay zu einem Handle.
    pub fn overlay(&self, handle: OverlayHandle) -> Option<&RecordedOverlay> {
        self.overlays.get(&handle.0)
    }

    fn guard_overlay_ops(&self, operation: &'static str) -> Result<(), ResourceError> {
        if self.fail_overlay_ops {
            Err(ResourceError::new(operation, "Karten-Oberfläche nicht bereit (injiziert)"))
        } else {
            Ok(())
        }
    }

    fn update_vertices(
        &mut self,
        operation: &'static str,
        handle: OverlayHandle,
        expected: OverlayKind,
        vertices: &[LatLng],
    ) -> Result<(), ResourceError> {
        self.guard_overlay_ops(operation)?;
        let overlay = self
            .overlays
            .get_mut(&handle.0)
            .ok_or_else(|| ResourceError::new(operation, format!("unbekanntes Handle {handle:?}")))?;
        if overlay.kind != expected {
            return Err(ResourceError::new(
                operation,
                format!("Handle {handle:?} ist kein {expected:?}"),
            ));
        }
        overlay.vertices = vertices.to_vec();
        Ok(())
    }
}

impl MapSurface for HeadlessSurface {
    fn subscribe_clicks(&mut self) -> Result<ClickSubscription, ResourceError> {
        if self.fail_subscribe {
            return Err(ResourceError::new(
                "subscribe_clicks",
                "Karten-Oberfläche nicht bereit (injiziert)",
            ));
        }
        let id = self.alloc_id();
        self.subscriptions.push(id);
        Ok(ClickSubscription(id))
    }

    fn unsubscribe_clicks(&mut self, subscription: ClickSubscription) {
        self.subscriptions.retain(|&id| id != subscription.0);
    }

    fn create_polyline(
        &mut self,
        vertices: &[LatLng],
        _style: &StrokeStyle,
    ) -> Result<OverlayHandle, ResourceError> {
        self.guard_overlay_ops("create_polyline")?;
        let id = self.alloc_id();
        self.overlays.insert(
            id,
            RecordedOverlay {
                kind: OverlayKind::Polyline,
                vertices: vertices.to_vec(),
            },
        );
        Ok(OverlayHandle(id))
    }

    fn update_polyline(
        &mut self,
        handle: OverlayHandle,
        vertices: &[LatLng],
    ) -> Result<(), ResourceError> {
        self.update_vertices("update_polyline", handle, OverlayKind::Polyline, vertices)
    }

    fn create_polygon(
        &mut self,
        vertices: &[LatLng],
        _style: &FillStyle,
    ) -> Result<OverlayHandle, ResourceError> {
        self.guard_overlay_ops("create_polygon")?;
        let id = self.alloc_id();
        self.overlays.insert(
            id,
            RecordedOverlay {
                kind: OverlayKind::Polygon,
                vertices: vertices.to_vec(),
            },
        );
        Ok(OverlayHandle(id))
    }

    fn update_polygon(
        &mut self,
        handle: OverlayHandle,
        vertices: &[LatLng],
    ) -> Result<(), ResourceError> {
        self.update_vertices("update_polygon", handle, OverlayKind::Polygon, vertices)
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) -> Result<(), ResourceError> {
        self.guard_overlay_ops("remove_overlay")?;
        self.overlays
            .remove(&handle.0)
            .map(|_| ())
            .ok_or_else(|| {
                ResourceError::new("remove_overlay", format!("unbekanntes Handle {handle:?}"))
            })
    }
}

/// In-Memory-Marker-Fabrik ohne Rendering.
#[derive(Debug, Default)]
pub struct HeadlessMarkers {
    next_id: u64,
    anchors: HashMap<u64, LatLng>,
    /// Fehlerinjektion: alle Anker-Operationen schlagen fehl
    pub fail_anchor_ops: bool,
}

impl HeadlessMarkers {
    /// Erstellt eine leere Marker-Fabrik.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl existierender Anker.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Position eines Ankers.
    pub fn anchor_position(&self, handle: AnchorHandle) -> Option<LatLng> {
        self.anchors.get(&handle.0).copied()
    }
}

impl MarkerFactory for HeadlessMarkers {
    fn create_anchor(
        &mut self,
        at: LatLng,
        _style: &AnchorStyle,
    ) -> Result<AnchorHandle, ResourceError> {
        if self.fail_anchor_ops {
            return Err(ResourceError::new(
                "create_anchor",
                "Marker-Fabrik nicht bereit (injiziert)",
            ));
        }
        self.next_id += 1;
        self.anchors.insert(self.next_id, at);
        Ok(AnchorHandle(self.next_id))
    }

    fn remove_anchor(&mut self, handle: AnchorHandle) -> Result<(), ResourceError> {
        if self.fail_anchor_ops {
            return Err(ResourceError::new(
                "remove_anchor",
                "Marker-Fabrik nicht bereit (injiziert)",
            ));
        }
        self.anchors
            .remove(&handle.0)
            .map(|_| ())
            .ok_or_else(|| {
                ResourceError::new("remove_anchor", format!("unbekanntes Handle {handle:?}"))
            })
    }
}
