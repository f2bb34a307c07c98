//! One marker type per IMM API operation

use crate::models::*;
use crate::API_VERSION;
use cloud_bindings_client::Operation;
use cloud_bindings_common::OperationMetadata;

macro_rules! operation {
    ($name:ident, $request:ty, $body:ty) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Operation for $name {
            const METADATA: OperationMetadata =
                OperationMetadata::rpc(stringify!($name), API_VERSION);
            type Request = $request;
            type ResponseBody = $body;
        }
    };
}

// Projects
operation!(CreateProject, CreateProjectRequest, CreateProjectResponseBody);
operation!(GetProject, GetProjectRequest, GetProjectResponseBody);
operation!(UpdateProject, UpdateProjectRequest, UpdateProjectResponseBody);
operation!(DeleteProject, DeleteProjectRequest, DeleteProjectResponseBody);
operation!(ListProjects, ListProjectsRequest, ListProjectsResponseBody);

// Datasets
operation!(CreateDataset, CreateDatasetRequest, CreateDatasetResponseBody);
operation!(GetDataset, GetDatasetRequest, GetDatasetResponseBody);
operation!(UpdateDataset, UpdateDatasetRequest, UpdateDatasetResponseBody);
operation!(DeleteDataset, DeleteDatasetRequest, DeleteDatasetResponseBody);
operation!(ListDatasets, ListDatasetsRequest, ListDatasetsResponseBody);

// Bindings
operation!(CreateBinding, CreateBindingRequest, CreateBindingResponseBody);
operation!(GetBinding, GetBindingRequest, GetBindingResponseBody);
operation!(ListBindings, ListBindingsRequest, ListBindingsResponseBody);
operation!(DeleteBinding, DeleteBindingRequest, DeleteBindingResponseBody);
operation!(ResumeBinding, ResumeBindingRequest, ResumeBindingResponseBody);
operation!(StopBinding, StopBindingRequest, StopBindingResponseBody);

// File metadata
operation!(IndexFileMeta, IndexFileMetaRequest, IndexFileMetaResponseBody);
operation!(
    BatchIndexFileMeta,
    BatchIndexFileMetaRequest,
    BatchIndexFileMetaResponseBody
);
operation!(GetFileMeta, GetFileMetaRequest, GetFileMetaResponseBody);
operation!(
    BatchGetFileMeta,
    BatchGetFileMetaRequest,
    BatchGetFileMetaResponseBody
);
operation!(UpdateFileMeta, UpdateFileMetaRequest, UpdateFileMetaResponseBody);
operation!(
    BatchUpdateFileMeta,
    BatchUpdateFileMetaRequest,
    BatchUpdateFileMetaResponseBody
);
operation!(DeleteFileMeta, DeleteFileMetaRequest, DeleteFileMetaResponseBody);
operation!(
    BatchDeleteFileMeta,
    BatchDeleteFileMetaRequest,
    BatchDeleteFileMetaResponseBody
);

// Queries
operation!(SimpleQuery, SimpleQueryRequest, SimpleQueryResponseBody);
operation!(FuzzyQuery, FuzzyQueryRequest, FuzzyQueryResponseBody);
operation!(SemanticQuery, SemanticQueryRequest, SemanticQueryResponseBody);

// Tasks
operation!(GetTask, GetTaskRequest, GetTaskResponseBody);
operation!(ListTasks, ListTasksRequest, ListTasksResponseBody);
operation!(
    CreateFigureClusteringTask,
    CreateFigureClusteringTaskRequest,
    CreateFigureClusteringTaskResponseBody
);
operation!(
    CreateMediaConvertTask,
    CreateMediaConvertTaskRequest,
    CreateMediaConvertTaskResponseBody
);

// Detection
operation!(
    DetectImageLabels,
    DetectImageLabelsRequest,
    DetectImageLabelsResponseBody
);
operation!(
    DetectImageFaces,
    DetectImageFacesRequest,
    DetectImageFacesResponseBody
);
operation!(DetectMediaMeta, DetectMediaMetaRequest, DetectMediaMetaResponseBody);

// Weboffice
operation!(
    GenerateWebofficeToken,
    GenerateWebofficeTokenRequest,
    GenerateWebofficeTokenResponseBody
);
