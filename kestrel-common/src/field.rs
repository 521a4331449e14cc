//! Metadata fields
//!
//! Names of the tags defined by Exif 2.2 and of the maker note tags of the
//! supported vendors. Every field has a marker type implementing
//! [`Field`](crate::exif::Field).

mod macros;

use crate::exif::Namespace;

macros::make_fields![
    // IFD0
    (0x100, ImageWidth, Tiff),
    (0x101, ImageLength, Tiff),
    (0x102, BitsPerSample, Tiff),
    (0x103, Compression, Tiff),
    (0x106, PhotometricInterpretation, Tiff),
    (0x10E, ImageDescription, Tiff),
    (0x10F, Make, Tiff),
    (0x110, Model, Tiff),
    (0x111, StripOffsets, Tiff),
    /// Image orientation and mirroring
    (0x112, Orientation, Tiff),
    (0x115, SamplesPerPixel, Tiff),
    (0x116, RowsPerStrip, Tiff),
    (0x117, StripByteCounts, Tiff),
    (0x11A, XResolution, Tiff),
    (0x11B, YResolution, Tiff),
    (0x11C, PlanarConfiguration, Tiff),
    (0x128, ResolutionUnit, Tiff),
    (0x12D, TransferFunction, Tiff),
    (0x131, Software, Tiff),
    (0x132, DateTime, Tiff),
    (0x13B, Artist, Tiff),
    (0x13E, WhitePoint, Tiff),
    (0x13F, PrimaryChromaticities, Tiff),
    /// Offset of the JPEG thumbnail, usually in IFD1
    (0x201, ThumbnailJPEGInterchangeFormat, Tiff, "JPEGInterchangeFormat"),
    (0x202, ThumbnailJPEGInterchangeFormatLength, Tiff, "JPEGInterchangeFormatLength"),
    (0x211, YCbCrCoefficients, Tiff),
    (0x212, YCbCrSubSampling, Tiff),
    (0x213, YCbCrPositioning, Tiff),
    (0x214, ReferenceBlackWhite, Tiff),
    (0x8298, Copyright, Tiff),
    (0x8769, ExifIFDPointer, Tiff),
    (0x8825, GPSInfoIFDPointer, Tiff),

    // Exif
    (0x829A, ExposureTime, Exif),
    (0x829D, FNumber, Exif),
    (0x8822, ExposureProgram, Exif),
    (0x8824, SpectralSensitivity, Exif),
    /// Also called PhotographicSensitivity since Exif 2.3
    (0x8827, ISOSpeedRatings, Exif),
    (0x8828, OECF, Exif),
    (0x9000, ExifVersion, Exif),
    (0x9003, DateTimeOriginal, Exif),
    (0x9004, DateTimeDigitized, Exif),
    (0x9101, ComponentsConfiguration, Exif),
    (0x9102, CompressedBitsPerPixel, Exif),
    (0x9201, ShutterSpeedValue, Exif),
    /// Lens aperture with unit APEX
    (0x9202, ApertureValue, Exif),
    (0x9203, BrightnessValue, Exif),
    (0x9204, ExposureBiasValue, Exif),
    (0x9205, MaxApertureValue, Exif),
    (0x9206, SubjectDistance, Exif),
    (0x9207, MeteringMode, Exif),
    (0x9208, LightSource, Exif),
    (0x9209, Flash, Exif),
    (0x920A, FocalLength, Exif),
    (0x9214, SubjectArea, Exif),
    (0x927C, MakerNote, Exif),
    (0x9286, UserComment, Exif),
    (0x9290, SubSecTime, Exif),
    (0x9291, SubSecTimeOriginal, Exif),
    (0x9292, SubSecTimeDigitized, Exif),
    (0xA000, FlashpixVersion, Exif),
    (0xA001, ColorSpace, Exif),
    (0xA002, PixelXDimension, Exif),
    (0xA003, PixelYDimension, Exif),
    (0xA004, RelatedSoundFile, Exif),
    (0xA005, InteroperabilityIFDPointer, Exif),
    (0xA20B, FlashEnergy, Exif),
    (0xA20C, SpatialFrequencyResponse, Exif),
    (0xA20E, FocalPlaneXResolution, Exif),
    (0xA20F, FocalPlaneYResolution, Exif),
    (0xA210, FocalPlaneResolutionUnit, Exif),
    (0xA214, SubjectLocation, Exif),
    (0xA215, ExposureIndex, Exif),
    (0xA217, SensingMethod, Exif),
    (0xA300, FileSource, Exif),
    (0xA301, SceneType, Exif),
    (0xA302, CFAPattern, Exif),
    (0xA401, CustomRendered, Exif),
    (0xA402, ExposureMode, Exif),
    (0xA403, WhiteBalance, Exif),
    (0xA404, DigitalZoomRatio, Exif),
    (0xA405, FocalLengthIn35mmFilm, Exif),
    (0xA406, SceneCaptureType, Exif),
    (0xA407, GainControl, Exif),
    (0xA408, Contrast, Exif),
    (0xA409, Saturation, Exif),
    (0xA40A, Sharpness, Exif),
    (0xA40B, DeviceSettingDescription, Exif),
    (0xA40C, SubjectDistanceRange, Exif),
    (0xA420, ImageUniqueID, Exif),
    (0xA430, CameraOwnerName, Exif),
    (0xA431, BodySerialNumber, Exif),
    (0xA432, LensSpecification, Exif),
    (0xA433, LensMake, Exif),
    (0xA434, LensModel, Exif),

    // GPS
    (0x0, GPSVersionID, Gps),
    (0x1, GPSLatitudeRef, Gps),
    (0x2, GPSLatitude, Gps),
    (0x3, GPSLongitudeRef, Gps),
    (0x4, GPSLongitude, Gps),
    (0x5, GPSAltitudeRef, Gps),
    (0x6, GPSAltitude, Gps),
    (0x7, GPSTimeStamp, Gps),
    (0x8, GPSSatellites, Gps),
    (0x9, GPSStatus, Gps),
    (0xA, GPSMeasureMode, Gps),
    (0xB, GPSDOP, Gps),
    (0xC, GPSSpeedRef, Gps),
    (0xD, GPSSpeed, Gps),
    (0xE, GPSTrackRef, Gps),
    (0xF, GPSTrack, Gps),
    (0x10, GPSImgDirectionRef, Gps),
    (0x11, GPSImgDirection, Gps),
    (0x12, GPSMapDatum, Gps),
    (0x13, GPSDestLatitudeRef, Gps),
    (0x14, GPSDestLatitude, Gps),
    (0x15, GPSDestLongitudeRef, Gps),
    (0x16, GPSDestLongitude, Gps),
    (0x17, GPSDestBearingRef, Gps),
    (0x18, GPSDestBearing, Gps),
    (0x19, GPSDestDistanceRef, Gps),
    (0x1A, GPSDestDistance, Gps),
    (0x1B, GPSProcessingMethod, Gps),
    (0x1C, GPSAreaInformation, Gps),
    (0x1D, GPSDateStamp, Gps),
    (0x1E, GPSDifferential, Gps),

    // Interoperability
    (0x1, InteroperabilityIndex, Interoperability),
    (0x2, InteroperabilityVersion, Interoperability),

    // Canon
    (0x1, CanonCameraSettings, Canon, "Canon.CameraSettings"),
    (0x2, CanonFocalLength, Canon, "Canon.FocalLength"),
    (0x4, CanonShotInfo, Canon, "Canon.ShotInfo"),
    (0x5, CanonPanorama, Canon, "Canon.Panorama"),
    (0x6, CanonImageType, Canon, "Canon.ImageType"),
    (0x7, CanonFirmwareVersion, Canon, "Canon.FirmwareVersion"),
    (0x8, CanonFileNumber, Canon, "Canon.FileNumber"),
    (0x9, CanonOwnerName, Canon, "Canon.OwnerName"),
    (0xC, CanonSerialNumber, Canon, "Canon.SerialNumber"),
    (0xD, CanonCameraInfo, Canon, "Canon.CameraInfo"),
    (0xF, CanonCustomFunctions, Canon, "Canon.CustomFunctions"),
    (0x10, CanonModelID, Canon, "Canon.ModelID"),
    (0x12, CanonPictureInfo, Canon, "Canon.PictureInfo"),
    (0x13, CanonThumbnailImageValidArea, Canon, "Canon.ThumbnailImageValidArea"),
    (0x15, CanonSerialNumberFormat, Canon, "Canon.SerialNumberFormat"),
    (0x1A, CanonSuperMacro, Canon, "Canon.SuperMacro"),
    (0x26, CanonAFInfo2, Canon, "Canon.AFInfo2"),
    (0x83, CanonOriginalDecisionDataOffset, Canon, "Canon.OriginalDecisionDataOffset"),
    (0x93, CanonFileInfo, Canon, "Canon.FileInfo"),
    (0x95, CanonLensModel, Canon, "Canon.LensModel"),
    (0x96, CanonInternalSerialNumber, Canon, "Canon.InternalSerialNumber"),
    (0x97, CanonDustRemovalData, Canon, "Canon.DustRemovalData"),
    (0x99, CanonCustomFunctions2, Canon, "Canon.CustomFunctions2"),
    (0xA0, CanonProcessingInfo, Canon, "Canon.ProcessingInfo"),
    (0xAA, CanonMeasuredColor, Canon, "Canon.MeasuredColor"),
    (0xB4, CanonColorSpace, Canon, "Canon.ColorSpace"),
    (0xD0, CanonVRDOffset, Canon, "Canon.VRDOffset"),
    (0xE0, CanonSensorInfo, Canon, "Canon.SensorInfo"),
    (0x4001, CanonColorData, Canon, "Canon.ColorData"),

    // Nikon type 1
    (0x2, Nikon1Version, Nikon1, "Nikon1.Version"),
    (0x3, Nikon1Quality, Nikon1, "Nikon1.Quality"),
    (0x4, Nikon1ColorMode, Nikon1, "Nikon1.ColorMode"),
    (0x5, Nikon1ImageAdjustment, Nikon1, "Nikon1.ImageAdjustment"),
    (0x6, Nikon1CCDSensitivity, Nikon1, "Nikon1.CCDSensitivity"),
    (0x7, Nikon1WhiteBalance, Nikon1, "Nikon1.WhiteBalance"),
    (0x8, Nikon1Focus, Nikon1, "Nikon1.Focus"),
    (0xA, Nikon1DigitalZoom, Nikon1, "Nikon1.DigitalZoom"),
    (0xB, Nikon1Converter, Nikon1, "Nikon1.Converter"),

    // Nikon type 3
    (0x1, NikonVersion, Nikon, "Nikon.Version"),
    (0x2, NikonISOSpeed, Nikon, "Nikon.ISOSpeed"),
    (0x3, NikonColorMode, Nikon, "Nikon.ColorMode"),
    (0x4, NikonQuality, Nikon, "Nikon.Quality"),
    (0x5, NikonWhiteBalance, Nikon, "Nikon.WhiteBalance"),
    (0x6, NikonSharpening, Nikon, "Nikon.Sharpening"),
    (0x7, NikonFocus, Nikon, "Nikon.Focus"),
    (0x8, NikonFlashSetting, Nikon, "Nikon.FlashSetting"),
    (0x9, NikonFlashDevice, Nikon, "Nikon.FlashDevice"),
    (0xB, NikonWhiteBalanceBias, Nikon, "Nikon.WhiteBalanceBias"),
    (0xC, NikonWBRBLevels, Nikon, "Nikon.WB_RBLevels"),
    (0xD, NikonProgramShift, Nikon, "Nikon.ProgramShift"),
    (0xE, NikonExposureDiff, Nikon, "Nikon.ExposureDiff"),
    (0xF, NikonISOSelection, Nikon, "Nikon.ISOSelection"),
    (0x10, NikonDataDump, Nikon, "Nikon.DataDump"),
    (0x11, NikonPreview, Nikon, "Nikon.Preview"),
    (0x12, NikonFlashComp, Nikon, "Nikon.FlashComp"),
    (0x13, NikonISOSettings, Nikon, "Nikon.ISOSettings"),
    (0x16, NikonImageBoundary, Nikon, "Nikon.ImageBoundary"),
    (0x17, NikonFlashExposureComp, Nikon, "Nikon.FlashExposureComp"),
    (0x18, NikonFlashBracketComp, Nikon, "Nikon.FlashBracketComp"),
    (0x19, NikonExposureBracketComp, Nikon, "Nikon.ExposureBracketComp"),
    (0x1A, NikonImageProcessing, Nikon, "Nikon.ImageProcessing"),
    (0x1B, NikonCropHiSpeed, Nikon, "Nikon.CropHiSpeed"),
    (0x1D, NikonSerialNumber, Nikon, "Nikon.SerialNumber"),
    (0x1E, NikonColorSpace, Nikon, "Nikon.ColorSpace"),
    (0x1F, NikonVRInfo, Nikon, "Nikon.VRInfo"),
    (0x20, NikonImageAuthentication, Nikon, "Nikon.ImageAuthentication"),
    (0x22, NikonActiveDLighting, Nikon, "Nikon.ActiveDLighting"),
    (0x23, NikonPictureControl, Nikon, "Nikon.PictureControl"),
    (0x24, NikonWorldTime, Nikon, "Nikon.WorldTime"),
    (0x25, NikonISOInfo, Nikon, "Nikon.ISOInfo"),
    (0x2A, NikonVignetteControl, Nikon, "Nikon.VignetteControl"),
    (0x80, NikonImageAdjustment, Nikon, "Nikon.ImageAdjustment"),
    (0x81, NikonToneComp, Nikon, "Nikon.ToneComp"),
    (0x82, NikonAuxiliaryLens, Nikon, "Nikon.AuxiliaryLens"),
    (0x83, NikonLensType, Nikon, "Nikon.LensType"),
    (0x84, NikonLens, Nikon, "Nikon.Lens"),
    (0x85, NikonFocusDistance, Nikon, "Nikon.FocusDistance"),
    (0x86, NikonDigitalZoom, Nikon, "Nikon.DigitalZoom"),
    (0x87, NikonFlashMode, Nikon, "Nikon.FlashMode"),
    (0x88, NikonAFInfo, Nikon, "Nikon.AFInfo"),
    (0x89, NikonShootingMode, Nikon, "Nikon.ShootingMode"),
    (0x8B, NikonLensFStops, Nikon, "Nikon.LensFStops"),
    (0x8C, NikonContrastCurve, Nikon, "Nikon.ContrastCurve"),
    (0x8D, NikonColorHue, Nikon, "Nikon.ColorHue"),
    (0x8F, NikonSceneMode, Nikon, "Nikon.SceneMode"),
    (0x90, NikonLightSource, Nikon, "Nikon.LightSource"),
    (0x91, NikonShotInfo, Nikon, "Nikon.ShotInfo"),
    (0x92, NikonHueAdjustment, Nikon, "Nikon.HueAdjustment"),
    (0x93, NikonNEFCompression, Nikon, "Nikon.NEFCompression"),
    (0x94, NikonSaturation, Nikon, "Nikon.Saturation"),
    (0x95, NikonNoiseReduction, Nikon, "Nikon.NoiseReduction"),
    (0x96, NikonLinearizationTable, Nikon, "Nikon.LinearizationTable"),
    (0x97, NikonColorBalance, Nikon, "Nikon.ColorBalance"),
    (0x98, NikonLensData, Nikon, "Nikon.LensData"),
    (0x99, NikonRawImageCenter, Nikon, "Nikon.RawImageCenter"),
    (0x9A, NikonSensorPixelSize, Nikon, "Nikon.SensorPixelSize"),
    (0x9C, NikonSceneAssist, Nikon, "Nikon.SceneAssist"),
    (0x9E, NikonRetouchHistory, Nikon, "Nikon.RetouchHistory"),
    (0xA0, NikonSerialNO, Nikon, "Nikon.SerialNO"),
    (0xA2, NikonImageDataSize, Nikon, "Nikon.ImageDataSize"),
    (0xA5, NikonImageCount, Nikon, "Nikon.ImageCount"),
    (0xA6, NikonDeletedImageCount, Nikon, "Nikon.DeletedImageCount"),
    (0xA7, NikonShutterCount, Nikon, "Nikon.ShutterCount"),
    (0xA9, NikonImageOptimization, Nikon, "Nikon.ImageOptimization"),
    (0xAA, NikonSaturation2, Nikon, "Nikon.Saturation2"),
    (0xAB, NikonVariProgram, Nikon, "Nikon.VariProgram"),
    (0xAC, NikonImageStabilization, Nikon, "Nikon.ImageStabilization"),
    (0xAD, NikonAFResponse, Nikon, "Nikon.AFResponse"),
    (0xB1, NikonHighISONoiseReduction, Nikon, "Nikon.HighISONoiseReduction"),
    (0xB3, NikonToningEffect, Nikon, "Nikon.ToningEffect"),
    (0xB6, NikonPowerUpTime, Nikon, "Nikon.PowerUpTime"),
    (0xB7, NikonAFInfo2, Nikon, "Nikon.AFInfo2"),
    (0xB8, NikonFileInfo, Nikon, "Nikon.FileInfo"),
    (0xE00, NikonPrintIM, Nikon, "Nikon.PrintIM"),
    (0xE01, NikonCaptureData, Nikon, "Nikon.CaptureData"),
    (0xE09, NikonCaptureVersion, Nikon, "Nikon.CaptureVersion"),
    (0xE0E, NikonCaptureOffsets, Nikon, "Nikon.CaptureOffsets"),
    (0xE10, NikonScanIFD, Nikon, "Nikon.ScanIFD"),
    (0xE1D, NikonICCProfile, Nikon, "Nikon.ICCProfile"),
    (0xE1E, NikonCaptureOutput, Nikon, "Nikon.CaptureOutput"),

    // Apple
    (0x1, AppleMakerNoteVersion, Apple, "Apple.MakerNoteVersion"),
    (0x3, AppleRunTime, Apple, "Apple.RunTime"),
    (0x8, AppleAccelerationVector, Apple, "Apple.AccelerationVector"),
    (0xA, AppleHDRImageType, Apple, "Apple.HDRImageType"),
    (0xB, AppleBurstUUID, Apple, "Apple.BurstUUID"),
    (0x11, AppleMediaGroupUUID, Apple, "Apple.MediaGroupUUID"),
    (0x14, AppleImageCaptureType, Apple, "Apple.ImageCaptureType"),
    (0x15, AppleImageUniqueID, Apple, "Apple.ImageUniqueID"),
];
